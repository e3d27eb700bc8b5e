use std::collections::BTreeMap;

/// Validation messages keyed by a form's field enum, so every failing field
/// can be shown at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, String>);

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    /// Keeps the first message recorded for a field.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn extend(&mut self, other: FieldErrors<F>) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> Vec<F> {
        self.0.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Name,
        Email,
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Email, "Email is required.");
        errors.insert(Field::Email, "Email is invalid.");
        errors.insert(Field::Name, "Name is required.");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some("Email is required."));
        assert_eq!(errors.fields(), vec![Field::Name, Field::Email]);
    }

    #[test]
    fn into_result_passes_value_only_when_clean() {
        assert_eq!(FieldErrors::<Field>::default().into_result(7), Ok(7));

        let mut other = FieldErrors::default();
        other.insert(Field::Name, "Name is required.");
        let mut errors = FieldErrors::default();
        errors.extend(other);
        assert_eq!(errors.clone().into_result(7), Err(errors));
    }
}
