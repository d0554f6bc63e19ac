use crate::errors::{Error, Result};

/// A value that is exactly one of two types, `Left(L)` or `Right(R)`.
///
/// By convention `Right` carries the primary outcome and `Left` the
/// alternative one, but the two sides are fully symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    #[inline]
    pub fn is_left(&self) -> bool {
        match self {
            Either::Left(_) => true,
            _ => false,
        }
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        match self {
            Either::Right(_) => true,
            _ => false,
        }
    }

    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            _ => None,
        }
    }

    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Either::Right(r) => Some(r),
            _ => None,
        }
    }

    pub fn try_left(self) -> Result<L> {
        match self {
            Either::Left(l) => Ok(l),
            _ => Err(Error::MissingLeft),
        }
    }

    pub fn try_right(self) -> Result<R> {
        match self {
            Either::Right(r) => Ok(r),
            _ => Err(Error::MissingRight),
        }
    }

    /// Returns the `Left` value, panics on a `Right`.
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(l) => l,
            _ => panic!("{}", Error::MissingLeft),
        }
    }

    /// Returns the `Right` value, panics on a `Left`.
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Right(r) => r,
            _ => panic!("{}", Error::MissingRight),
        }
    }

    pub fn left_or(self, fallback: L) -> L {
        match self {
            Either::Left(l) => l,
            _ => fallback,
        }
    }

    pub fn right_or(self, fallback: R) -> R {
        match self {
            Either::Right(r) => r,
            _ => fallback,
        }
    }

    pub fn left_or_default(self) -> L
    where
        L: Default,
    {
        self.left().unwrap_or_default()
    }

    pub fn right_or_default(self) -> R
    where
        R: Default,
    {
        self.right().unwrap_or_default()
    }

    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Calls exactly one of the callbacks with the held value.
    pub fn for_each<F, G>(self, on_left: F, on_right: G)
    where
        F: FnOnce(L),
        G: FnOnce(R),
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Dispatches to the handler matching the held variant and returns its
    /// result. Handlers may switch sides.
    pub fn fold<F, G>(self, on_left: F, on_right: G) -> Either<L, R>
    where
        F: FnOnce(L) -> Either<L, R>,
        G: FnOnce(R) -> Either<L, R>,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Applies `mapper` to a `Left` value, passes a `Right` through.
    pub fn map_left<F>(self, mapper: F) -> Either<L, R>
    where
        F: FnOnce(L) -> Either<L, R>,
    {
        match self {
            Either::Left(l) => mapper(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Applies `mapper` to a `Right` value, passes a `Left` through.
    pub fn map_right<F>(self, mapper: F) -> Either<L, R>
    where
        F: FnOnce(R) -> Either<L, R>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => mapper(r),
        }
    }
}
