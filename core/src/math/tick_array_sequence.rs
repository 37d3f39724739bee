//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

use crate::{
    CoreError, TickArraySnapshot, TickCoordinate, TickFacade, INVALID_TICK_ARRAY_SEQUENCE, INVALID_TICK_INDEX, MAX_TICK_INDEX, MIN_TICK_INDEX,
    TICK_ARRAY_NOT_INITIALIZED, TICK_ARRAY_SIZE, TICK_INDEX_OUT_OF_BOUNDS, TICK_SEQUENCE_EMPTY,
};

/// The order in which the window is consumed, fixed at construction.
/// An a->b trade walks tick arrays in decreasing tick order, so successive
/// window slots hold decreasing array indexes; b->a is the mirror image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum WindowOrder {
    Descending,
    Ascending,
}

impl WindowOrder {
    fn local_slot(&self, start_array_index: i32, array_index: i32) -> i32 {
        match self {
            WindowOrder::Descending => start_array_index - array_index,
            WindowOrder::Ascending => array_index - start_array_index,
        }
    }

    fn advance(&self, coordinate: TickCoordinate) -> TickCoordinate {
        match self {
            WindowOrder::Descending => coordinate.prev_initializable(),
            WindowOrder::Ascending => coordinate.next_initializable(),
        }
    }
}

/// An ordered window of pre-fetched tick array snapshots consumed in one
/// trade direction. Element 0 must contain the pool's current tick; the
/// remaining elements are assumed contiguous in the trade direction, which
/// `tick` re-validates at every access.
///
/// The sequence records which window slots were read so that instruction
/// builders can list exactly the arrays a swap will cross.
pub struct TickArraySequence<A> {
    tick_arrays: Vec<TickArraySnapshot<A>>,
    tick_spacing: u16,
    order: WindowOrder,
    start_array_index: i32,
    touched: Vec<bool>,
}

impl<A: Clone> TickArraySequence<A> {
    pub fn new(tick_arrays: Vec<TickArraySnapshot<A>>, tick_spacing: u16, a_to_b: bool) -> Result<Self, CoreError> {
        if tick_spacing == 0 {
            return Err(INVALID_TICK_INDEX);
        }
        let first = tick_arrays.first().and_then(|snapshot| snapshot.data.as_ref()).ok_or(TICK_SEQUENCE_EMPTY)?;
        let start_array_index = TickCoordinate::from_tick_index(first.start_tick_index, tick_spacing).array_index;
        let touched = vec![false; tick_arrays.len()];
        let order = if a_to_b { WindowOrder::Descending } else { WindowOrder::Ascending };
        Ok(Self {
            tick_arrays,
            tick_spacing,
            order,
            start_array_index,
            touched,
        })
    }

    /// Whether the array at `position` covers `tick_index`. The upper bound
    /// of an array's range is inclusive: the first tick of the neighbouring
    /// array also counts as covered.
    pub fn contains_tick(&self, position: usize, tick_index: i32) -> bool {
        match self.tick_arrays.get(position).and_then(|snapshot| snapshot.data.as_ref()) {
            Some(data) => self.in_array_range(data.start_tick_index, tick_index),
            None => false,
        }
    }

    /// The number of window slots read at least once so far.
    pub fn touched_array_count(&self) -> usize {
        self.touched.iter().filter(|touched| **touched).count()
    }

    /// The addresses of all touched arrays in window order, padded to
    /// `min_count` by repeating the last touched entry. Callers building a
    /// fixed-length account list rely on the padding. Empty if nothing was
    /// ever touched.
    pub fn touched_arrays(&self, min_count: usize) -> Vec<A> {
        let mut result: Vec<A> = self
            .touched
            .iter()
            .zip(&self.tick_arrays)
            .filter(|(touched, _)| **touched)
            .map(|(_, snapshot)| snapshot.address.clone())
            .collect();

        if result.is_empty() {
            return result;
        }

        while result.len() < min_count {
            result.push(result[result.len() - 1].clone());
        }
        result
    }

    /// Read the tick at `tick_index`, marking the window slot it resolves to
    /// as touched. The slot is marked even when the array turns out to carry
    /// no data, since the swap instruction still references the account.
    pub fn tick(&mut self, tick_index: i32) -> Result<TickFacade, CoreError> {
        let coordinate = TickCoordinate::from_tick_index(tick_index, self.tick_spacing);
        let slot = self.window_slot(coordinate).ok_or(TICK_INDEX_OUT_OF_BOUNDS)?;

        self.touched[slot] = true;

        let data = self.tick_arrays[slot].data.as_ref().ok_or(TICK_ARRAY_NOT_INITIALIZED)?;
        if !self.in_array_range(data.start_tick_index, tick_index) {
            // The window the caller assembled is not contiguous: the array
            // that landed in this slot covers some other tick range.
            return Err(INVALID_TICK_ARRAY_SEQUENCE);
        }
        Ok(data.ticks[coordinate.offset_index])
    }

    /// Find the next initialized tick in the trade direction.
    ///
    /// For a->b the search includes `current_tick_index` itself; for b->a it
    /// starts one spacing above it and never re-examines the current tick.
    ///
    /// Returns `(None, boundary)` when the window runs out of data before an
    /// initialized tick is found, with `boundary` clamped to the global tick
    /// range. That is a normal result: the caller must stop stepping and
    /// treat the quote as bounded by the supplied window.
    pub fn next_initialized_tick(&mut self, current_tick_index: i32) -> Result<(Option<TickFacade>, i32), CoreError> {
        let search_index = match self.order {
            WindowOrder::Descending => current_tick_index,
            WindowOrder::Ascending => current_tick_index + self.tick_spacing as i32,
        };
        let mut coordinate = TickCoordinate::from_tick_index(search_index, self.tick_spacing);

        // Starting past the window means the swap already consumed more
        // arrays than the caller supplied.
        if self.window_slot(coordinate).is_none() {
            return Err(INVALID_TICK_ARRAY_SEQUENCE);
        }

        while self.window_slot(coordinate).is_some() {
            let tick = self.tick(coordinate.tick_index())?;
            if tick.initialized {
                return Ok((Some(tick), coordinate.tick_index()));
            }
            coordinate = self.order.advance(coordinate);
        }

        // The loop stepped one coordinate past the window edge.
        let boundary = match self.order {
            WindowOrder::Descending => coordinate.tick_index() + self.tick_spacing as i32,
            WindowOrder::Ascending => coordinate.tick_index() - 1,
        };
        Ok((None, boundary.clamp(MIN_TICK_INDEX, MAX_TICK_INDEX)))
    }

    fn window_slot(&self, coordinate: TickCoordinate) -> Option<usize> {
        let slot = self.order.local_slot(self.start_array_index, coordinate.array_index);
        if slot >= 0 && (slot as usize) < self.tick_arrays.len() {
            Some(slot as usize)
        } else {
            None
        }
    }

    fn in_array_range(&self, start_tick_index: i32, tick_index: i32) -> bool {
        let upper_bound = start_tick_index + self.tick_spacing as i32 * TICK_ARRAY_SIZE as i32;
        tick_index >= start_tick_index && tick_index <= upper_bound
    }
}
