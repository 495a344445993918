mod macros;

pub trait Apply {
    /// Applies the function `f` with a mutable reference to `self`.
    fn with<X>(mut self, f: impl FnOnce(&mut Self) -> X) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }

    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use folio_utils::Apply;
    /// fn append_signature(body: String, signature: Option<&str>) -> String {
    ///     body.apply_map(signature, |body, sig| format!("{body}\n-- \n{sig}"))
    /// }
    /// assert_eq!(append_signature("Hi".into(), None), "Hi");
    /// assert_eq!(append_signature("Hi".into(), Some("Jo")), "Hi\n-- \nJo");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }

    /// Passes `self` through `f`, allowing free functions in method chains.
    fn apply(self, f: impl FnOnce(Self) -> Self) -> Self
    where
        Self: Sized,
    {
        f(self)
    }
}

impl<T> Apply for T {}
