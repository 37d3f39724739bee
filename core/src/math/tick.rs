//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

use crate::{CoreError, INVALID_TICK_INDEX, MAX_TICK_INDEX, MIN_TICK_INDEX, TICK_ARRAY_SIZE};

/// Get the first tick index of the tick array that contains the specified
/// tick index. Floors toward negative infinity, so negative indexes land in
/// the array below them rather than the one above.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick index
/// - `tick_spacing` - A u16 integer representing the tick spacing
///
/// # Returns
/// - A i32 integer representing the first tick index in the tick array
pub fn tick_array_start_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
    let ticks_per_array = tick_spacing as i32 * TICK_ARRAY_SIZE as i32;
    tick_index.div_euclid(ticks_per_array) * ticks_per_array
}

/// Position of a tick expressed as (array slot, offset within the array).
/// Derived from a global tick index, never stored on chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickCoordinate {
    pub array_index: i32,
    pub offset_index: usize,
    tick_spacing: u16,
}

impl TickCoordinate {
    /// Strict conversion from a global tick index. Fails if the index is not
    /// a multiple of the tick spacing or lies outside the global tick range.
    pub fn try_from_tick_index(tick_index: i32, tick_spacing: u16) -> Result<Self, CoreError> {
        if tick_spacing == 0 {
            return Err(INVALID_TICK_INDEX);
        }
        if !(MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index) {
            return Err(INVALID_TICK_INDEX);
        }
        if tick_index % tick_spacing as i32 != 0 {
            return Err(INVALID_TICK_INDEX);
        }
        Ok(Self::from_tick_index(tick_index, tick_spacing))
    }

    /// Flooring conversion from a global tick index. An unaligned index maps
    /// to the initializable tick at or below it. The tick sequence search
    /// relies on this while walking from the pool's current tick, which is
    /// generally not a multiple of the spacing.
    pub fn from_tick_index(tick_index: i32, tick_spacing: u16) -> Self {
        let spaced_index = tick_index.div_euclid(tick_spacing as i32);
        let array_index = spaced_index.div_euclid(TICK_ARRAY_SIZE as i32);
        let offset_index = spaced_index.rem_euclid(TICK_ARRAY_SIZE as i32) as usize;
        Self {
            array_index,
            offset_index,
            tick_spacing,
        }
    }

    /// The global tick index this coordinate points at. Exact inverse of
    /// `try_from_tick_index`.
    pub fn tick_index(&self) -> i32 {
        (self.array_index * TICK_ARRAY_SIZE as i32 + self.offset_index as i32) * self.tick_spacing as i32
    }

    /// The coordinate one tick-spacing step toward increasing tick index.
    pub fn next_initializable(&self) -> Self {
        if self.offset_index + 1 == TICK_ARRAY_SIZE {
            Self {
                array_index: self.array_index + 1,
                offset_index: 0,
                ..*self
            }
        } else {
            Self {
                offset_index: self.offset_index + 1,
                ..*self
            }
        }
    }

    /// The coordinate one tick-spacing step toward decreasing tick index.
    pub fn prev_initializable(&self) -> Self {
        if self.offset_index == 0 {
            Self {
                array_index: self.array_index - 1,
                offset_index: TICK_ARRAY_SIZE - 1,
                ..*self
            }
        } else {
            Self {
                offset_index: self.offset_index - 1,
                ..*self
            }
        }
    }
}
