use crate::optional::{absent, present, Optional};

/// Converts `source` into an optional of type `K` by applying `mapper` to the held value.
///
/// `mapper` is called exactly once if `source` is present, and never if it is absent. A panic in `mapper`
/// propagates to the caller.
///
/// ```
/// use opt_core::{absent, map, present};
///
/// assert_eq!(map(|t| t * 2, present(3)).get(), 6);
/// assert!(map(|t: i32| t * 2, absent()).is_empty());
/// ```
#[inline]
pub fn map<T, K>(mapper: impl FnOnce(T) -> K, source: Optional<T>) -> Optional<K> {
  match source {
    Optional::Present(value) => {
      #[cfg(feature = "tracing")]
      tracing::trace!(from = std::any::type_name::<T>(), to = std::any::type_name::<K>(), "mapping present optional");
      present(mapper(value))
    }
    Optional::Absent => {
      #[cfg(feature = "tracing")]
      tracing::trace!(from = std::any::type_name::<T>(), to = std::any::type_name::<K>(), "skipping mapper of absent optional");
      absent()
    }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use std::panic::{catch_unwind, AssertUnwindSafe};

  use super::*;

  #[test]
  fn map_present() {
    assert_eq!(map(|t| t * 2, present(3)).get(), 6);
    assert_eq!(map(|t| t * 2, present(2)).get(), 4);
    assert_eq!(map(|s: &str| s.len(), present("name")).get(), 4);
  }

  #[test]
  fn map_absent() {
    assert!(map(|t: i32| t * 2, absent()).is_empty());
    assert!(map(|s: String| s.len(), absent()).is_empty());
  }

  #[test]
  fn mapper_called_once_when_present() {
    let calls = Cell::new(0);
    let mapped = map(|t: i32| {
      calls.set(calls.get() + 1);
      t.to_string()
    }, present(12));
    assert_eq!(calls.get(), 1);
    assert_eq!(mapped.get(), "12");
  }

  #[test]
  fn mapper_never_called_when_absent() {
    let calls = Cell::new(0);
    let mapped = map(|t: i32| {
      calls.set(calls.get() + 1);
      t.to_string()
    }, absent());
    assert!(mapped.is_empty());
    assert_eq!(calls.get(), 0);

    let mapped = absent::<i32>().map(|_| -> u8 { panic!("mapper called on absent optional") });
    assert!(mapped.is_empty());
  }

  #[test]
  fn mapper_panic_propagates() {
    let result = catch_unwind(AssertUnwindSafe(|| {
      map(|_: i32| -> i32 { panic!("mapper failed") }, present(1))
    }));
    let payload = result.expect_err("mapper panic must propagate");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"mapper failed"));
  }

  #[test]
  fn identity_preserves_state() {
    for opt in [present(0), present(-5), present(i32::MAX), absent()] {
      assert_eq!(map(|t| t, opt), opt);
    }
    let name = present("name".to_string());
    assert_eq!(map(|t| t, name.clone()), name);
  }

  #[test]
  fn composition() {
    let f = |t: i32| t + 1;
    let g = |t: i32| t.to_string();
    for value in [-3, 0, 7, 100] {
      assert_eq!(map(g, map(f, present(value))), map(|t| g(f(t)), present(value)));
    }
    assert_eq!(map(g, map(f, absent())), map(|t| g(f(t)), absent()));
  }

  #[test]
  fn method_form_matches_free_function() {
    assert_eq!(present(3).map(|t| t * 2), map(|t| t * 2, present(3)));
    assert_eq!(absent::<i32>().map(|t| t * 2), map(|t: i32| t * 2, absent()));
  }

  #[test]
  fn map_does_not_change_source() {
    let source = present(3);
    let doubled = map(|t| t * 2, source);
    assert_eq!(source.get(), 3);
    assert_eq!(doubled.get(), 6);
  }
}
