//! Factories seeding documents straight into the in-memory store.
