/// A configuration value, together with the bounds a value must fall within.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds.
    /// Otherwise, returns the bounds.
    pub fn set(&mut self, value: T) -> Result<(), (T, T)> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(self.min_max())
        }
    }
}
