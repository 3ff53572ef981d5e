//! Game registry: owned games addressed by [`GameId`](crate::core::GameId).

pub mod games;

pub use games::GameRegistry;
