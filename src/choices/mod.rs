mod modifier_choice;
mod solver_config;

pub use modifier_choice::ModifierKind;
pub use solver_config::SolverConfig;
