use thiserror::Error;

/// Panic message of [`Optional::get`] on an absent optional, and display message of [`AbsentError`].
pub const ABSENT_ACCESS_MESSAGE: &str = "absent optional accessed unsafely";

/// A value of type `T` that is either present or absent.
///
/// Constructed once through [`present`] or [`absent`], and never changed afterwards: no operation takes
/// `&mut self`. Accessors either consume the optional or borrow it through [`as_ref`](Self::as_ref).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Optional<T> {
  /// No value.
  Absent,
  /// Some value `T`.
  Present(T),
}

/// Error of [`Optional::try_get`] on an absent optional.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("{}", ABSENT_ACCESS_MESSAGE)]
pub struct AbsentError;


/// Creates a present optional holding `value`.
///
/// Presence is about the optional, not the value: zero values are present too.
///
/// ```
/// use opt_core::present;
///
/// assert!(!present(0).is_empty());
/// assert!(!present("").is_empty());
/// ```
#[inline]
pub const fn present<T>(value: T) -> Optional<T> {
  Optional::Present(value)
}

/// Creates an absent optional of type `T`.
///
/// ```
/// use opt_core::absent;
///
/// let name = absent::<String>();
/// assert!(name.is_empty());
/// ```
#[inline]
pub const fn absent<T>() -> Optional<T> {
  Optional::Absent
}


impl<T> Optional<T> {
  #[inline]
  pub const fn present(value: T) -> Self { Self::Present(value) }
  #[inline]
  pub const fn absent() -> Self { Self::Absent }


  /// Returns the held value.
  ///
  /// # Panics
  ///
  /// Panics with [`ABSENT_ACCESS_MESSAGE`] if `self` is absent. Use [`try_get`](Self::try_get),
  /// [`get_or_else`](Self::get_or_else), or [`get_or_zero`](Self::get_or_zero) when absence is expected.
  ///
  /// ```
  /// use opt_core::present;
  ///
  /// assert_eq!(present(2).get(), 2);
  /// ```
  ///
  /// ```should_panic
  /// use opt_core::absent;
  ///
  /// absent::<i32>().get(); // panics
  /// ```
  #[inline]
  #[track_caller]
  pub fn get(self) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => absent_access_failed::<T>(),
    }
  }

  /// Returns the held value, or [`AbsentError`] if `self` is absent.
  ///
  /// ```
  /// use opt_core::{absent, present, AbsentError};
  ///
  /// assert_eq!(present(2).try_get(), Ok(2));
  /// assert_eq!(absent::<i32>().try_get(), Err(AbsentError));
  /// ```
  #[inline]
  pub fn try_get(self) -> Result<T, AbsentError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => {
        #[cfg(feature = "tracing")]
        tracing::debug!(value_type = std::any::type_name::<T>(), "checked access of absent optional");
        Err(AbsentError)
      }
    }
  }

  /// Returns the held value, or `default` if `self` is absent.
  ///
  /// ```
  /// use opt_core::{absent, present};
  ///
  /// assert_eq!(present("test").get_or_else("test2"), "test");
  /// assert_eq!(absent::<i32>().get_or_else(3), 3);
  /// ```
  #[inline]
  pub fn get_or_else(self, default: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default,
    }
  }

  /// Returns the held value, or the zero value of `T` if `self` is absent.
  ///
  /// ```
  /// use opt_core::{absent, present};
  ///
  /// assert_eq!(present(true).get_or_zero(), true);
  /// assert_eq!(absent::<String>().get_or_zero(), "");
  /// ```
  #[inline]
  pub fn get_or_zero(self) -> T where
    T: Default
  {
    match self {
      Self::Present(value) => value,
      Self::Absent => T::default(),
    }
  }

  /// Returns `true` if `self` is absent.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    matches!(self, Self::Absent)
  }

  #[inline]
  pub const fn is_present(&self) -> bool {
    !self.is_empty()
  }


  /// Borrows the held value, leaving `self` untouched.
  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }

  /// Method form of [`map`](crate::map::map).
  #[inline]
  pub fn map<K>(self, mapper: impl FnOnce(T) -> K) -> Optional<K> {
    crate::map::map(mapper, self)
  }
}


impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self {
    match optional {
      Optional::Present(value) => Some(value),
      Optional::Absent => None,
    }
  }
}


#[cold]
#[inline(never)]
#[track_caller]
fn absent_access_failed<T>() -> ! {
  #[cfg(feature = "tracing")]
  tracing::error!(value_type = std::any::type_name::<T>(), "{}", ABSENT_ACCESS_MESSAGE);
  panic!("{}", ABSENT_ACCESS_MESSAGE)
}
