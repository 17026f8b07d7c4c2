mod lookup;
mod run;

pub use lookup::LookupCommand;
pub use run::RunCommand;
