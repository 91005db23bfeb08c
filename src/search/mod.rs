//! Move selection: candidate generation, critical-move detection,
//! bounded minimax with alpha-beta pruning, and the difficulty-
//! configured agent.

pub mod agent;
pub mod candidates;
pub mod minimax;
pub mod rng;

pub use agent::{Agent, AgentConfig, Difficulty};
pub use candidates::candidate_moves;
pub use minimax::{find_critical_move, find_winning_move, search_best_move};
pub use rng::AgentRng;
