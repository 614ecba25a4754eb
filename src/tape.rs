//! Implementations of the program tape

use crate::{settings::PointerPolicy, CellValue, TapeAddr, TapeAddrError};

/// A trait implementing a tape for the program memory
pub trait Tape {
    /// Number of cells on the tape
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn try_get(&self, offset: TapeAddr) -> Result<CellValue, TapeAddrError>;
    fn try_set(&mut self, offset: TapeAddr, value: CellValue) -> Result<(), TapeAddrError>;
    fn try_modify(&mut self, offset: TapeAddr, diff: CellValue) -> Result<(), TapeAddrError>;
}

/// A fixed size tape implemented with a Vec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecTape {
    data: Vec<CellValue>,
    policy: PointerPolicy,
}

impl VecTape {
    /// Create a zeroed tape with `capacity` cells (at least one).
    pub fn new(capacity: usize, policy: PointerPolicy) -> Self {
        #[cfg(fuzzing)]
        let capacity = capacity.min(2usize.pow(20));
        Self {
            data: vec![0.into(); capacity.max(1)],
            policy,
        }
    }

    /// Raw view of all cells
    pub fn cells(&self) -> &[CellValue] {
        &self.data
    }

    /// Resolve a pointer to a cell index according to the pointer policy.
    fn index(&self, offset: TapeAddr) -> Result<usize, TapeAddrError> {
        match self.policy {
            PointerPolicy::Error => {
                let idx: usize = offset.try_into()?;
                if idx >= self.data.len() {
                    return Err(TapeAddrError::TapeAddrTooLarge);
                }
                Ok(idx)
            }
            PointerPolicy::Wrap => Ok(i64::from(offset).rem_euclid(self.data.len() as i64) as usize),
        }
    }
}

impl Tape for VecTape {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn try_get(&self, offset: TapeAddr) -> Result<CellValue, TapeAddrError> {
        let idx = self.index(offset)?;
        Ok(self.data[idx])
    }

    fn try_set(&mut self, offset: TapeAddr, value: CellValue) -> Result<(), TapeAddrError> {
        let idx = self.index(offset)?;
        self.data[idx] = value;
        Ok(())
    }

    fn try_modify(&mut self, offset: TapeAddr, diff: CellValue) -> Result<(), TapeAddrError> {
        let idx = self.index(offset)?;
        self.data[idx] += diff;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Tape, VecTape};
    use crate::{settings::PointerPolicy, TapeAddrError};

    #[test]
    fn test_vec_tape() {
        let mut tape = VecTape::new(10, PointerPolicy::Error);
        assert_eq!(tape.len(), 10);
        tape.try_set(2.into(), 5.into()).unwrap();
        assert_eq!(tape.try_get(2.into()), Ok(5.into()));
        tape.try_modify(2.into(), 255.into()).unwrap();
        assert_eq!(tape.try_get(2.into()), Ok(4.into()));
        tape.try_modify(8.into(), 200.into()).unwrap();
        assert_eq!(tape.try_get(8.into()), Ok(200.into()));
        assert_eq!(tape.try_get(9.into()), Ok(0.into()));

        assert_eq!(
            tape.try_get((-1).into()),
            Err(TapeAddrError::TapeAddrIsNegative)
        );
        assert_eq!(
            tape.try_set((-1).into(), 200.into()),
            Err(TapeAddrError::TapeAddrIsNegative)
        );
        assert_eq!(
            tape.try_modify(10.into(), 1.into()),
            Err(TapeAddrError::TapeAddrTooLarge)
        );
    }

    #[test]
    fn test_wrapping_tape() {
        let mut tape = VecTape::new(4, PointerPolicy::Wrap);
        tape.try_set((-1).into(), 7.into()).unwrap();
        assert_eq!(tape.try_get(3.into()), Ok(7.into()));
        tape.try_modify(5.into(), 1.into()).unwrap();
        assert_eq!(tape.try_get(1.into()), Ok(1.into()));
        assert_eq!(tape.cells().len(), 4);
    }

    #[test]
    fn test_zero_capacity_gets_one_cell() {
        let tape = VecTape::new(0, PointerPolicy::Wrap);
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.try_get(12.into()), Ok(0.into()));
    }
}
