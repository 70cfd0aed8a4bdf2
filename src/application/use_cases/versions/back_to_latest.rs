use crate::application::ports::version_navigation::{VersionChange, VersionChangeHandler};

/// Hands control back to the navigation layer, asking for the latest
/// version. Pure delegation, no store or endpoint involved.
pub struct BackToLatest<'a> {
    pub handler: &'a VersionChangeHandler,
}

impl<'a> BackToLatest<'a> {
    pub fn execute(&self) {
        (self.handler)(VersionChange::Latest);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn sends_latest_exactly_once() {
        let seen: Arc<Mutex<Vec<VersionChange>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handler: VersionChangeHandler =
            Arc::new(move |change| sink.lock().unwrap().push(change));

        BackToLatest { handler: &handler }.execute();

        assert_eq!(*seen.lock().unwrap(), vec![VersionChange::Latest]);
    }
}
