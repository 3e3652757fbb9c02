//! In-place editing of arrays and objects.
//!
//! Operations that need a particular container fail with
//! [`DynJsonError::TypeMismatch`] on the wrong tag, except [`Value::del`] and
//! [`Value::shuffle`], which are silent no-ops there. [`Value::nil_to_array`] and
//! [`Value::nil_to_map`] only ever touch a `Null` receiver.

use crate::error::{DynJsonError, Result};
use crate::types::{Map, Value};
use rand::Rng;

impl Value {
    /// Insert or overwrite `key`. Requires an object.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.as_map_mut()?.insert(key.into(), value.into());
        Ok(())
    }

    /// Remove `key` if `self` is an object holding it; otherwise do nothing.
    pub fn del(&mut self, key: &str) -> &mut Self {
        if let Value::Object(map) = self {
            map.remove(key);
        }
        self
    }

    /// Append to an array.
    pub fn push_back(&mut self, value: impl Into<Value>) -> Result<()> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Prepend to an array.
    pub fn push_front(&mut self, value: impl Into<Value>) -> Result<()> {
        self.as_array_mut()?.insert(0, value.into());
        Ok(())
    }

    /// Remove and return the element at `index`, keeping the rest in order.
    pub fn del_at(&mut self, index: isize) -> Result<Value> {
        let arr = self.as_array_mut()?;
        let len = arr.len();
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(arr.remove(i)),
            _ => Err(DynJsonError::IndexOutOfRange { index, len }),
        }
    }

    /// Remove the last element. On an empty array this asks for index `-1` and
    /// fails with `IndexOutOfRange`.
    pub fn pop_back(&mut self) -> Result<Value> {
        let len = self.as_array_mut()?.len();
        let last = isize::try_from(len).unwrap_or(isize::MAX) - 1;
        self.del_at(last)
    }

    /// Remove the first element. Fails with `IndexOutOfRange` on an empty array.
    pub fn pop_front(&mut self) -> Result<Value> {
        self.del_at(0)
    }

    /// Turn a `Null` node into an empty array. Any other node is left alone.
    pub fn nil_to_array(&mut self) -> &mut Self {
        if self.is_null() {
            *self = Value::Array(Vec::new());
        }
        self
    }

    /// Turn a `Null` node into an empty object. Any other node is left alone.
    pub fn nil_to_map(&mut self) -> &mut Self {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        self
    }

    /// Uniformly permute an array in place using `rng`. Other tags are untouched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        if let Value::Array(arr) = self {
            // inside-out Fisher-Yates: every prefix stays a uniform permutation
            for i in 1..arr.len() {
                let j = rng.gen_range(0..=i);
                arr.swap(i, j);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn shuffle_with_zero_rng_rotates_deterministically() {
        let mut v = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);
        let mut rng = StepRng::new(0, 0);
        v.shuffle(&mut rng);
        // j is always 0: swap(1, 0) then swap(2, 0)
        assert_eq!(v.to_i64_array().unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn pop_back_on_empty_reports_minus_one() {
        let mut v = Value::Array(Vec::new());
        assert_eq!(
            v.pop_back(),
            Err(DynJsonError::IndexOutOfRange { index: -1, len: 0 })
        );
    }
}
