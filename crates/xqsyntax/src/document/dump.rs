//! Test-only dump methods for document inspection.
