//! Per-resource request sequencing.
//!
//! Every fetch start issues a ticket; only the newest ticket for a resource
//! may settle it. An overlapping older request that lands late is dropped
//! instead of overwriting fresher data.

use std::fmt;

/// A fetchable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Clients,
    Vistorias,
}

impl Resource {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Vistorias => "vistorias",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Proof of a fetch start, presented when the fetch settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    resource: Resource,
    seq: u64,
}

impl FetchTicket {
    #[must_use]
    pub fn resource(&self) -> Resource {
        self.resource
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Default)]
pub(crate) struct FetchTickets {
    clients: u64,
    vistorias: u64,
}

impl FetchTickets {
    fn counter(&mut self, resource: Resource) -> &mut u64 {
        match resource {
            Resource::Clients => &mut self.clients,
            Resource::Vistorias => &mut self.vistorias,
        }
    }

    pub(crate) fn issue(&mut self, resource: Resource) -> FetchTicket {
        let counter = self.counter(resource);
        *counter += 1;
        FetchTicket {
            resource,
            seq: *counter,
        }
    }

    pub(crate) fn is_current(&self, ticket: FetchTicket) -> bool {
        let latest = match ticket.resource {
            Resource::Clients => self.clients,
            Resource::Vistorias => self.vistorias,
        };
        ticket.seq == latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut tickets = FetchTickets::default();
        let first = tickets.issue(Resource::Clients);
        let second = tickets.issue(Resource::Clients);
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }

    #[test]
    fn test_resources_are_independent() {
        let mut tickets = FetchTickets::default();
        let clients = tickets.issue(Resource::Clients);
        let vistorias = tickets.issue(Resource::Vistorias);
        assert!(tickets.is_current(clients));
        assert!(tickets.is_current(vistorias));
        assert_eq!(clients.seq(), 1);
        assert_eq!(vistorias.seq(), 1);
    }
}
