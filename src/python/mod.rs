//! Python interpreter discovery and subprocess execution.
//!
//! Every diagnostic in this crate runs through a Python interpreter: the
//! capabilities under test are Python libraries, so the only honest way to
//! probe them is to ask Python itself. This module finds the interpreter and
//! runs short programs through it.

pub mod interpreter;
pub mod script;

pub use interpreter::PythonInterpreter;
pub use script::ScriptOutput;
