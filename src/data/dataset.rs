use crate::types::Example;

/// Fixed-length, randomly indexable collection of examples
pub trait Dataset {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Example>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dataset for [Example] {
    fn len(&self) -> usize {
        <[Example]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&Example> {
        <[Example]>::get(self, index)
    }
}

impl Dataset for Vec<Example> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&Example> {
        self.as_slice().get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_dataset() {
        let data = vec![
            Example::new().with_field("input", "a"),
            Example::new().with_field("input", "b"),
        ];
        assert_eq!(Dataset::len(&data), 2);
        assert!(!Dataset::is_empty(&data));
        assert_eq!(Dataset::get(&data, 1).unwrap().get("input").unwrap(), "b");
        assert!(Dataset::get(&data, 2).is_none());
    }

    #[test]
    fn test_empty_slice_dataset() {
        let data: &[Example] = &[];
        assert!(Dataset::is_empty(data));
    }
}
