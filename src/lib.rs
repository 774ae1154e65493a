// Classic object-oriented design patterns as runnable Rust examples.

pub mod examples {
    //! # Design Patterns by Example
    //!
    //! This crate provides runnable examples for three classic patterns,
    //! each built around a small toy domain:
    //!
    //! ## Pattern 1: Decorator (coffee pricing)
    //! - Trait-object chains (comma-joined descriptions)
    //! - Zero-cost generic wrappers ("+"-joined descriptions)
    //! - Per-size pricing with validated size changes
    //!
    //! ## Pattern 2: Factory Method (pizza ordering)
    //! - Template method ordering pipeline (prepare, bake, cut, box)
    //! - Concrete stores deciding which pizza to instantiate
    //!
    //! ## Pattern 3: Observer (weather station)
    //! - Push notification (subject sends the measurements)
    //! - Pull notification (observers read back from the subject)
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_decorator
    //! cargo run --bin p2_factory_method
    //! cargo run --bin p3_observer
    //! ```
}
