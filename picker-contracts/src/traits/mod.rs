// SPDX-License-Identifier: GPL-3.0-only

pub mod actors;
pub mod selections;
pub mod works;

pub use actors::ActorStore;
pub use selections::SelectionStore;
pub use works::WorkStore;
