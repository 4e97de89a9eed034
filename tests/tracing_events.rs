#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ungraph::UnGraph;

/// Shared in-memory sink for formatted events.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_mutations_and_traversals_emit_events() {
    let sink = Captured::default();
    let writer = sink.clone();
    let _guard = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        )
        .set_default();

    let mut g: UnGraph<u32> = UnGraph::new();
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.bfs(&1);
    assert_eq!(g.distance(&1, &3), Some(2));
    g.remove_vertex(&2);
    g.clear();

    let log = sink.text();
    for message in [
        "added edge",
        "bfs finished",
        "distance found",
        "removed vertex and incident edges",
        "clearing graph",
    ] {
        assert!(log.contains(message), "missing {message:?} in:\n{log}");
    }
    assert!(log.lines().all(|line| line.contains("ungraph")));
    assert!(log.contains("TRACE"));
    assert!(log.contains("DEBUG"));
}

#[test]
fn test_events_carry_counts() {
    let sink = Captured::default();
    let writer = sink.clone();
    let _guard = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        )
        .set_default();

    let mut g: UnGraph<u32> = [(0, 1), (0, 2), (0, 3)].into();
    g.remove_vertex(&0);

    let log = sink.text();
    let line = log
        .lines()
        .find(|line| line.contains("removed vertex"))
        .expect("remove_vertex emits a debug event");
    assert!(line.contains("degree=3"), "{line}");
    assert!(line.contains("vertices=3"), "{line}");
}
