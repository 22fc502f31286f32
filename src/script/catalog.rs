//! Catalog of scripted dial paths.

use super::parser::{self, ScriptError};
use super::{CustomerId, DialPath, ToneGroup};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Delay after a single-digit group parsed from a script file.
pub const DEFAULT_SINGLE_DIGIT_DELAY: Duration = Duration::from_millis(3000);

/// Delay between menu transitions in the built-in table.
const BUILTIN_MENU_DELAY: Duration = Duration::from_millis(8000);

/// The set of dial paths available to one run.
///
/// Built once, from a script file or the built-in table, and read-only
/// afterward. Loading a script replaces the whole catalog; there is no
/// incremental merge.
#[derive(Debug, Clone)]
pub struct ScriptCatalog {
    paths: Vec<DialPath>,
    customer: CustomerId,
}

impl ScriptCatalog {
    /// Built-in fallback table: three traversals of a demo menu tree, each
    /// opening with the customer-id group `2,2,2,2,x,y`. The third path
    /// additionally keys a person id (`3,3,3,3,3,3,x,y`) after the first
    /// menu choice.
    pub fn builtin(customer: CustomerId) -> Self {
        let customer_group = || {
            ToneGroup::new(
                vec![2, 2, 2, 2, customer.tens(), customer.units()],
                Duration::ZERO,
            )
        };
        let person_group = || {
            ToneGroup::new(
                vec![3, 3, 3, 3, 3, 3, customer.tens(), customer.units()],
                Duration::ZERO,
            )
        };

        let paths = vec![
            DialPath::new(vec![
                customer_group(),
                ToneGroup::new(vec![1, 1, 1], BUILTIN_MENU_DELAY),
            ]),
            DialPath::new(vec![
                customer_group(),
                ToneGroup::new(vec![1, 1, 2], BUILTIN_MENU_DELAY),
            ]),
            DialPath::new(vec![
                customer_group(),
                ToneGroup::new(vec![2], BUILTIN_MENU_DELAY),
                person_group(),
                ToneGroup::new(vec![8, 1, 1], BUILTIN_MENU_DELAY),
            ]),
        ];

        info!(
            paths = paths.len(),
            customer = customer.value(),
            "using built-in path catalog"
        );
        Self { paths, customer }
    }

    /// Parse a catalog from script text.
    pub fn from_text(
        text: &str,
        customer: CustomerId,
        single_digit_delay: Duration,
    ) -> Result<Self, ScriptError> {
        let paths = parser::parse_lines(text, customer, single_digit_delay)?;
        Ok(Self { paths, customer })
    }

    /// Load a catalog from a script file.
    pub fn from_file(
        path: impl AsRef<Path>,
        customer: CustomerId,
        single_digit_delay: Duration,
    ) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_text(&text, customer, single_digit_delay)?;
        info!(
            paths = catalog.len(),
            script = %path.display(),
            "loaded path catalog"
        );
        Ok(catalog)
    }

    pub fn paths(&self) -> &[DialPath] {
        &self.paths
    }

    pub fn get(&self, index: usize) -> Option<&DialPath> {
        self.paths.get(index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The identifier substituted into this catalog's placeholder tokens.
    pub fn customer(&self) -> CustomerId {
        self.customer
    }
}
