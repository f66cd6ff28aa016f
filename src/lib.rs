pub mod allow_list;
pub mod ast;
pub mod evaluator;
pub mod programs;
pub mod render;

pub use allow_list::{AllowList, ConfigError, STANDARD_FIELDS};
pub use ast::{Clause, Expr};
pub use evaluator::{EvalError, checked_eval, eval};
pub use programs::{add1, example_program};
pub use render::{Rendered, Renderer, render};
