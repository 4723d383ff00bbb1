//! Shipment form controller.

use pepeng_estimate::ArrivalEstimator;
use pepeng_types::{Clock, Result, ShipmentRecord, SystemClock};

use crate::{FormInput, RecordStore, validate};

/// The shipment form: input fields, recorded shipments, estimator and clock.
///
/// [`Self::submit`] is the only operation that changes the store. It either
/// appends one record and resets the input, or fails and changes nothing.
#[derive(Debug, Clone)]
pub struct ShipmentForm<C: Clock = SystemClock> {
    input: FormInput,
    store: RecordStore,
    estimator: ArrivalEstimator,
    clock: C,
}

impl ShipmentForm<SystemClock> {
    /// Creates a form that reads today's date from the system calendar.
    #[must_use]
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ShipmentForm<C> {
    /// Creates a blank form with an empty store.
    #[must_use]
    pub fn new(clock: C) -> Self {
        let input = FormInput::new(clock.today());
        Self {
            input,
            store: RecordStore::new(),
            estimator: ArrivalEstimator::new(),
            clock,
        }
    }

    /// Returns the current input.
    #[must_use]
    pub const fn input(&self) -> &FormInput {
        &self.input
    }

    /// Returns the input for editing.
    pub const fn input_mut(&mut self) -> &mut FormInput {
        &mut self.input
    }

    /// Replaces the whole input.
    pub fn set_input(&mut self, input: FormInput) {
        self.input = input;
    }

    /// Returns the recorded shipments in submission order.
    #[must_use]
    pub fn records(&self) -> &[ShipmentRecord] {
        self.store.records()
    }

    /// Returns the record store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the clock for adjustment.
    pub const fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Discards the current input without recording anything.
    pub fn clear(&mut self) {
        self.input.reset(self.clock.today());
    }

    /// Records the current input as a shipment.
    ///
    /// On success the arrival date is estimated, the record is appended to
    /// the end of the store, every input field is reset to its default (ship
    /// date = the clock's today) and the new record is returned.
    ///
    /// # Errors
    ///
    /// Returns the validation or estimation error. In that case neither the
    /// input nor the store is modified.
    pub fn submit(&mut self) -> Result<&ShipmentRecord> {
        let record = match self.prepare() {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "shipment rejected");
                return Err(err);
            }
        };

        tracing::info!(
            id = %record.id(),
            courier = %record.courier(),
            ship_date = %record.ship_date(),
            arrival = %record.estimated_arrival(),
            total = self.store.len() + 1,
            "shipment recorded"
        );
        self.input.reset(self.clock.today());
        Ok(self.store.append(record))
    }

    fn prepare(&self) -> Result<ShipmentRecord> {
        let shipment = validate(&self.input)?;
        let arrival = self
            .estimator
            .arrival_date(shipment.courier, shipment.ship_date)?;
        Ok(shipment.into_record(arrival))
    }
}
