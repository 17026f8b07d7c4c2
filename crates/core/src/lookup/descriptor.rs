use std::fmt;

/// The closed set of address-discovery strategies.
///
/// The instruction set is fixed at these four members; adding a strategy is a
/// code change, not a configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Query a local network interface for its primary address
    Interface,
    /// Return the argument list joined with `,` as a literal address
    Echo,
    /// Run an external command and parse its output as a lookup result
    Exec,
    /// Perform an HTTP request and parse the response body as a lookup result
    Http,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Interface => "interface",
            Strategy::Echo => "echo",
            Strategy::Exec => "exec",
            Strategy::Http => "http",
        }
    }

    pub fn from_name(name: &str) -> Option<Strategy> {
        match name {
            "interface" => Some(Strategy::Interface),
            "echo" => Some(Strategy::Echo),
            "exec" => Some(Strategy::Exec),
            "http" => Some(Strategy::Http),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed lookup expression: strategy plus its ordered argument list.
///
/// Argument arity is not checked at parse time; each provider enforces its
/// own arity when the descriptor is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupDescriptor {
    pub strategy: Strategy,
    pub args: Vec<String>,
}
