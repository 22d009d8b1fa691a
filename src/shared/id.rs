use std::sync::Arc;

/// Hands out `PREFIX-000001` style ids, starting at 1.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    pub fn next_id(&mut self) -> Arc<str> {
        let id = format!("{}-{:06}", self.prefix, self.next);
        self.next += 1;
        id.into()
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

#[test]
fn sequence_test() {
    let mut seq = IdSequence::new("TKT");
    assert_eq!(&*seq.next_id(), "TKT-000001");
    assert_eq!(&*seq.next_id(), "TKT-000002");
}
