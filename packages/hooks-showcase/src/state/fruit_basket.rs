/// An append-only list of fruits, plus the text currently typed into the input that feeds it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FruitBasket {
    fruits: Vec<String>,
    pending: String,
}

impl FruitBasket {
    /// Replaces the pending input.
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Appends a copy of the pending input to the list.
    ///
    /// The pending input is left as-is, so pressing the button twice adds the same fruit twice.
    /// Empty input is appended like any other value.
    pub fn add(&mut self) {
        self.fruits.push(self.pending.clone());
        tracing::debug!(fruit = %self.pending, count = self.fruits.len(), "fruit added");
    }

    /// Returns the pending input.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Returns the fruits in the order they were added.
    pub fn fruits(&self) -> &[String] {
        &self.fruits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_in_order() {
        let mut basket = FruitBasket::default();
        basket.set_pending("apple");
        basket.add();
        basket.set_pending("banana");
        basket.add();
        assert_eq!(basket.fruits(), ["apple", "banana"]);
    }

    #[test]
    fn test_pending_survives_add() {
        let mut basket = FruitBasket::default();
        basket.set_pending("kiwi");
        basket.add();
        assert_eq!(basket.pending(), "kiwi");
        basket.add();
        assert_eq!(basket.fruits(), ["kiwi", "kiwi"]);
    }

    #[test]
    fn test_add_empty() {
        let mut basket = FruitBasket::default();
        basket.add();
        assert_eq!(basket.fruits(), [""]);
    }
}
