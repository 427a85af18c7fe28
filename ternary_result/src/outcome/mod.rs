//! The [`Outcome`] container and its total accessors.

mod conversions;

/// Opaque error type used when callers do not name one.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Either a success value or the error that prevented one.
///
/// Exactly one slot is ever populated. Outcomes expose no mutable access, so
/// a shared `Outcome` can be read from any number of threads whenever `T` and
/// `E` allow it.
///
/// # Examples
///
/// ```
/// use ternary_result::Outcome;
///
/// let hit: Outcome<Option<&str>, &str> = Outcome::wrap(Some("ferris"), None);
/// assert!(hit.is_valid());
/// assert_eq!(hit.value(), Some("ferris"));
///
/// let miss: Outcome<Option<&str>, &str> = Outcome::wrap(Some("stale"), Some("not found"));
/// assert!(!miss.is_valid());
/// assert_eq!(miss.value(), None);
/// assert_eq!(miss.error(), Some(&"not found"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[must_use]
pub enum Outcome<T, E = BoxedError> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with the contained error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Build a successful outcome holding `value`.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Build a failed outcome holding `error`.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Build an outcome from the conventional `(value, error)` pair.
    ///
    /// A present error always wins: the outcome fails and `value` is dropped,
    /// even if it is not `T::default()`. Without an error the outcome holds
    /// `value` exactly as given, including a default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_result::Outcome;
    ///
    /// let zero: Outcome<u32, &str> = Outcome::wrap(0, None);
    /// assert!(zero.is_valid());
    ///
    /// let failed: Outcome<u32, &str> = Outcome::wrap(7, Some("boom"));
    /// assert_eq!(failed.into_pair(), (0, Some("boom")));
    /// ```
    pub fn wrap(value: T, error: Option<E>) -> Self {
        error.map_or_else(
            || Self::Success(value),
            |err| {
                tracing::trace!(
                    payload = std::any::type_name::<T>(),
                    "error supplied; discarding accompanying value"
                );
                Self::Failure(err)
            },
        )
    }

    /// Whether the outcome holds a value rather than an error.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The stored value, or `T::default()` when the outcome failed.
    #[must_use]
    pub fn value(&self) -> T
    where
        T: Clone + Default,
    {
        self.value_ref().cloned().unwrap_or_default()
    }

    /// Consume the outcome, returning its value or `T::default()`.
    #[must_use]
    pub fn into_value(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Borrow the stored value, if any.
    ///
    /// Unlike [`Outcome::value`] this needs no `Default` bound and keeps
    /// "failed" distinct from "succeeded with a default value".
    #[must_use]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the stored error; `None` for a successful outcome.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Consume the outcome, returning its error if it failed.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Split the outcome back into the conventional `(value, error)` pair.
    ///
    /// Inverse of [`Outcome::wrap`]: a success yields `(value, None)` and a
    /// failure yields `(T::default(), Some(error))`.
    #[must_use]
    pub fn into_pair(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Self::Success(value) => (value, None),
            Self::Failure(err) => (T::default(), Some(err)),
        }
    }

    /// Borrow both slots, leaving `self` untouched.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Convert into a standard [`Result`] for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome failed.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}
