//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use std::sync::atomic::{AtomicUsize, Ordering};

use userdir::directory::Record;
use userdir::source::{LoadError, RecordSource};

/// The two-record fixture used by the filtering scenarios.
pub fn two_records() -> Vec<Record> {
    vec![
        Record::new(1, "Leanne Graham", "Bret", "a@b.com", "1"),
        Record::new(2, "Ervin Howell", "Antonette", "c@d.com", "2"),
    ]
}

/// A slightly larger fixture shaped like the public demo endpoint.
pub fn directory() -> Vec<Record> {
    vec![
        Record::new(1, "Leanne Graham", "Bret", "Sincere@april.biz", "1-770-736-8031 x56442"),
        Record::new(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "010-692-6593 x09125"),
        Record::new(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net", "1-463-123-4447"),
        Record::new(4, "Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org", "493-170-9623 x156"),
        Record::new(5, "Chelsey Dietrich", "Kamren", "Lucio_Hettinger@annie.ca", "(254)954-1289"),
    ]
}

/// In-memory source returning a fixed result and counting calls.
pub struct FakeSource {
    result: Result<Vec<Record>, LoadError>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn ok(records: Vec<Record>) -> Self {
        Self {
            result: Ok(records),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: LoadError) -> Self {
        Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecordSource for FakeSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
