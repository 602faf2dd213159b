//! Asynchronous resource state shared by every view.
//!
//! A `Resource<T>` is the `{data, loading, error}` triple a view renders from,
//! plus a generation counter. Each request started with [`Resource::begin`]
//! gets a [`Ticket`]; only the ticket of the latest request may settle the
//! resource. Responses for superseded requests (the route id changed, the
//! user pressed refresh) are dropped instead of overwriting newer state.
//!
//! Writes follow one contract: a write updates the held data from its own
//! response through [`Resource::apply`]; reads replace the data wholesale
//! through [`Resource::resolve`]. [`Resource::invalidate`] is the escape hatch
//! that forgets local state before a fresh read.

/// Identifies one in-flight request of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What a view should render for a resource.
#[derive(Debug, PartialEq)]
pub enum ResourceStatus<'a, T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Failed(&'a str),
    Ready(&'a T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request: marks the resource busy and clears any previous error.
    /// Held data is kept so that writes can merge into it later.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.generation)
    }

    /// Whether `ticket` belongs to the latest request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Settles `ticket` with freshly read data.
    pub fn resolve(&mut self, ticket: Ticket, data: T) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.data = Some(data);
        self.loading = false;
        true
    }

    /// Settles `ticket` by merging a write result into the held data.
    ///
    /// Returns `false` for a stale ticket. With no data held there is nothing
    /// to merge into; the request is still settled.
    pub fn apply(&mut self, ticket: Ticket, merge: impl FnOnce(&mut T)) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        if let Some(data) = self.data.as_mut() {
            merge(data);
        }
        self.loading = false;
        true
    }

    /// Settles `ticket` with a user-facing error message.
    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.error = Some(message.into());
        self.loading = false;
        true
    }

    /// Forgets local state and supersedes every in-flight request.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.data = None;
        self.loading = false;
        self.error = None;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Loading wins over an error, and an error blanks any held data.
    pub fn status(&self) -> ResourceStatus<'_, T> {
        if self.loading {
            ResourceStatus::Loading
        } else if let Some(error) = &self.error {
            ResourceStatus::Failed(error.as_str())
        } else if let Some(data) = &self.data {
            ResourceStatus::Ready(data)
        } else {
            ResourceStatus::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let resource: Resource<Vec<u32>> = Resource::new();
        assert_eq!(resource.status(), ResourceStatus::Idle);
        assert!(!resource.is_loading());
    }

    #[test]
    fn resolve_replaces_data() {
        let mut resource = Resource::new();
        let ticket = resource.begin();
        assert_eq!(resource.status(), ResourceStatus::Loading);

        assert!(resource.resolve(ticket, vec![1, 2]));
        assert_eq!(resource.status(), ResourceStatus::Ready(&vec![1, 2]));
    }

    #[test]
    fn stale_ticket_never_overwrites_newer_data() {
        let mut resource = Resource::new();
        let first = resource.begin();
        let second = resource.begin();

        assert!(resource.resolve(second, "second"));
        assert!(!resource.resolve(first, "first"));
        assert!(!resource.fail(first, "boom"));
        assert_eq!(resource.data(), Some(&"second"));
        assert_eq!(resource.error(), None);
    }

    #[test]
    fn only_the_latest_ticket_is_current() {
        let mut resource: Resource<u32> = Resource::new();
        let first = resource.begin();
        assert!(resource.is_current(first));

        let second = resource.begin();
        assert!(!resource.is_current(first));
        assert!(resource.is_current(second));

        resource.invalidate();
        assert!(!resource.is_current(second));
    }

    #[test]
    fn apply_merges_into_held_data() {
        let mut resource = Resource::new();
        let read = resource.begin();
        resource.resolve(read, vec![1, 2, 3]);

        let write = resource.begin();
        assert_eq!(resource.data(), Some(&vec![1, 2, 3]));
        assert!(resource.apply(write, |list| list.retain(|n| *n != 2)));
        assert_eq!(resource.status(), ResourceStatus::Ready(&vec![1, 3]));
    }

    #[test]
    fn apply_without_data_only_settles() {
        let mut resource: Resource<Vec<u32>> = Resource::new();
        let ticket = resource.begin();
        assert!(resource.apply(ticket, |list| list.push(1)));
        assert_eq!(resource.status(), ResourceStatus::Idle);
    }

    #[test]
    fn failure_blanks_the_view_until_next_request() {
        let mut resource = Resource::new();
        let read = resource.begin();
        resource.resolve(read, 5);

        let write = resource.begin();
        resource.fail(write, "Failed to add profile. Please try again later.");
        assert_eq!(
            resource.status(),
            ResourceStatus::Failed("Failed to add profile. Please try again later.")
        );

        resource.begin();
        assert_eq!(resource.error(), None);
        assert_eq!(resource.status(), ResourceStatus::Loading);
    }

    #[test]
    fn invalidate_drops_in_flight_results() {
        let mut resource = Resource::new();
        let read = resource.begin();
        resource.resolve(read, 1);

        let pending = resource.begin();
        resource.invalidate();
        assert!(!resource.resolve(pending, 2));
        assert_eq!(resource.status(), ResourceStatus::Idle);
    }
}
