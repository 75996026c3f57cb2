use crate::ops::Operation;

/// One completed calculation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    pub operation: Operation,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
}

/// Append-only log of completed calculations, oldest first.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<CalculationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: Operation, operand1: f64, operand2: f64, result: f64) {
        self.records.push(CalculationRecord {
            operation,
            operand1,
            operand2,
            result,
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&CalculationRecord> {
        self.records.last()
    }
}
