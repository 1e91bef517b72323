mod lookup_failure_policy;

pub use lookup_failure_policy::LookupFailurePolicy;
