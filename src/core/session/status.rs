use crate::core::error::FlowError;

/// The four operations that track loading and message state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    FetchProjects,
    CreateProject,
    Ingest,
    LoadDashboard,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::FetchProjects,
        OperationKind::CreateProject,
        OperationKind::Ingest,
        OperationKind::LoadDashboard,
    ];

    fn index(self) -> usize {
        match self {
            OperationKind::FetchProjects => 0,
            OperationKind::CreateProject => 1,
            OperationKind::Ingest => 2,
            OperationKind::LoadDashboard => 3,
        }
    }

    /// Shown when the backend fails without an error text of its own.
    pub fn failure_message(self) -> &'static str {
        match self {
            OperationKind::FetchProjects => "Failed to load projects",
            OperationKind::CreateProject => "Failed to create project",
            OperationKind::Ingest => "Failed to ingest data",
            OperationKind::LoadDashboard => "Failed to load project dashboard",
        }
    }
}

/// Identifies one started attempt of an operation.
///
/// Results carry the ticket of the attempt that produced them; a result whose
/// ticket is no longer the active one for its kind is stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    kind: OperationKind,
    epoch: u64,
}

impl Ticket {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    None,
    Success,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct OperationStatus {
    active: Option<Ticket>,
    message: String,
    message_kind: MessageKind,
    error: Option<FlowError>,
}

impl OperationStatus {
    pub fn in_flight(&self) -> bool {
        self.active.is_some()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn message_kind(&self) -> MessageKind {
        self.message_kind
    }

    /// The error behind the current error message.
    pub fn error(&self) -> Option<&FlowError> {
        self.error.as_ref()
    }

    pub(super) fn accepts(&self, ticket: Ticket) -> bool {
        self.active == Some(ticket)
    }

    pub(super) fn succeed(&mut self, message: Option<String>) {
        self.active = None;
        self.error = None;
        match message {
            Some(message) => {
                self.message = message;
                self.message_kind = MessageKind::Success;
            }
            None => self.clear_message(),
        }
    }

    pub(super) fn fail(&mut self, error: FlowError, message: String) {
        self.active = None;
        self.message = message;
        self.message_kind = MessageKind::Error;
        self.error = Some(error);
    }

    /// Records an error without touching the in-flight attempt.
    pub(super) fn report(&mut self, error: FlowError, message: String) {
        self.message = message;
        self.message_kind = MessageKind::Error;
        self.error = Some(error);
    }

    pub(super) fn clear_message(&mut self) {
        self.message.clear();
        self.message_kind = MessageKind::None;
        self.error = None;
    }

    /// Forgets the in-flight attempt; its result will be dropped on arrival.
    pub(super) fn abandon(&mut self) {
        self.active = None;
    }
}

/// Status per operation kind plus the epoch counter that mints tickets.
#[derive(Debug, Clone, Default)]
pub(super) struct Operations {
    statuses: [OperationStatus; 4],
    next_epoch: u64,
}

impl Operations {
    pub(super) fn get(&self, kind: OperationKind) -> &OperationStatus {
        &self.statuses[kind.index()]
    }

    pub(super) fn get_mut(&mut self, kind: OperationKind) -> &mut OperationStatus {
        &mut self.statuses[kind.index()]
    }

    /// Starts a new attempt, superseding any attempt still in flight.
    pub(super) fn start(&mut self, kind: OperationKind) -> Ticket {
        self.next_epoch += 1;
        let ticket = Ticket {
            kind,
            epoch: self.next_epoch,
        };
        self.get_mut(kind).active = Some(ticket);
        ticket
    }

    /// True when `ticket` belongs to the attempt currently in flight.
    pub(super) fn is_current(&self, ticket: Ticket) -> bool {
        let current = self.get(ticket.kind).accepts(ticket);
        if !current {
            tracing::debug!(
                operation = ?ticket.kind,
                epoch = ticket.epoch,
                "Dropping stale result"
            );
        }
        current
    }
}
