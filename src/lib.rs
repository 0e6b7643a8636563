//! Password generator core.
//!
//! ```
//! let mut rng = rand::thread_rng();
//! let password = pwgen::pass::generate(20, &mut rng).unwrap();
//! assert_eq!(password.len(), 20);
//! assert!(password.as_bytes()[0].is_ascii_digit());
//! ```

pub mod pass;
