use flagspec::{
    DuplicateParameterError, InvalidSpecificationParameterError, Parameters, Specification,
    SpecificationRegistry,
};

/// Enabled when `Min <= Max`. Both parameters are required integers.
#[derive(Debug, Clone, Default)]
pub struct MinMax {
    params: Parameters,
}

impl Specification for MinMax {
    fn evaluate(&self) -> bool {
        match (self.params.parse::<i64>("Min"), self.params.parse::<i64>("Max")) {
            (Some(Ok(min)), Some(Ok(max))) => min <= max,
            _ => false,
        }
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), DuplicateParameterError> {
        self.params.insert(name, value)
    }

    fn validate(&self, feature: &str) -> Result<(), InvalidSpecificationParameterError> {
        let mut missing = Vec::new();
        for name in ["Min", "Max"] {
            match self.params.parse::<i64>(name) {
                Some(Ok(_)) => {}
                Some(Err(_)) => missing.push(format!("'{name}' must be an integer")),
                None => missing.push(format!("'{name}' is required")),
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(InvalidSpecificationParameterError::new(
                feature,
                format!("myspec: {}.", missing.join(", ")),
            ))
        }
    }

    fn clone_box(&self) -> Box<dyn Specification> {
        Box::new(self.clone())
    }
}

pub fn registry() -> SpecificationRegistry {
    SpecificationRegistry::new().with("myspec", MinMax::default())
}
