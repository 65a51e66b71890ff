//! Rule-based password validation library
//!
//! Validates a password against an ordered set of named rules and reports
//! how many of them pass, so a UI can show progress as the user types.
//!
//! The engine is stateless: every input change runs [`validate`] then
//! [`aggregate`] from scratch. Rule sets are immutable; [`RuleSet::extend`]
//! returns a new set and leaves [`default_rules`] untouched.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RULES_MIN_LENGTH`: minimum length used by the default rule set
//!   (default: `8`)
//! - `PWD_RULES_BLACKLIST_PATH`: common-password file for [`Blacklist::from_env`]
//!   (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{aggregate, default_rules, validate, Rule};
//!
//! let custom = Rule::new(
//!     "customRule",
//!     "Password must be longer than 10 characters",
//!     |pwd: &str| pwd.chars().count() > 10,
//! )
//! .expect("valid rule");
//! let rules = default_rules().extend(custom).expect("unique name");
//!
//! let results = validate(&rules, "MyP@ssw0rd!");
//! let verdict = aggregate(&results);
//!
//! assert!(verdict.is_valid);
//! assert_eq!(verdict.progress_percent, 100.0);
//! ```

mod aggregate;
mod blacklist;
mod config;
#[cfg(feature = "async")]
mod debounce;
mod error;
mod observer;
mod rule;
mod rule_set;
pub mod rules;
mod validator;

// Public API
pub use aggregate::{aggregate, failed, Verdict};
pub use blacklist::{blacklist_path, Blacklist, BlacklistError};
pub use config::DefaultRulesConfig;
pub use error::{ConfigError, PredicateFailure, RuleError, RulePredicateError, SubmitError};
pub use observer::{evaluate_and_notify, Callbacks, PasswordField, ValidationObserver};
pub use rule::{Predicate, Rule};
pub use rule_set::{default_rules, RuleSet};
pub use validator::{validate, validate_detailed, validate_secret, ValidationReport, ValidationResult};

#[cfg(feature = "async")]
pub use debounce::{Debouncer, LatestGeneration};

#[cfg(feature = "async")]
pub use validator::{validate_tx, Evaluation, DEBOUNCE_DELAY};
