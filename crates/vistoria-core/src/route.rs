//! Navigation routes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens reachable through the navigation stack.
///
/// Only `DetalhesVistoria` carries parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    SharedList,
    NovoCliente,
    NovaVistoria,
    DetalhesVistoria { vistoria_id: i64 },
}

impl Route {
    /// Route name as registered in the navigation stack.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SharedList => "SharedList",
            Self::NovoCliente => "NovoCliente",
            Self::NovaVistoria => "NovaVistoria",
            Self::DetalhesVistoria { .. } => "DetalhesVistoria",
        }
    }

    /// Header title shown for the route.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "",
            Self::SharedList => "Clientes e Vistorias",
            Self::NovoCliente => "Novo Cliente",
            Self::NovaVistoria => "Nova Vistoria",
            Self::DetalhesVistoria { .. } => "Detalhes da Vistoria",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DetalhesVistoria { vistoria_id } => {
                write!(f, "{}({vistoria_id})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
