//! C surface for host applications that embed the estimator behind their
//! own form-based front end.
//!
//! Ownership: `train_estimator` hands out an opaque handle created with
//! `Box::into_raw`; it stays valid until `free_estimator`. Every function
//! tolerates null pointers and reports failure instead of unwinding across
//! the boundary.

use std::ffi::CStr;
use std::path::Path;
use std::ptr;

use libc::c_char;

use crate::data::dataset::FlightQuery;
use crate::training::trainer::{self, Estimator};

/// # Safety
/// `ptr` must be null or point to a nul-terminated string that stays alive
/// for the call.
unsafe fn cstr<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Train the estimator from the csv dataset at `csv_path`. Returns an
/// opaque handle, or null if the path is invalid or training fails.
#[unsafe(no_mangle)]
pub extern "C" fn train_estimator(csv_path: *const c_char) -> *mut Estimator {
    let Some(path) = (unsafe { cstr(csv_path) }) else {
        log::error!("train_estimator: csv_path is null or not valid utf-8");
        return ptr::null_mut();
    };
    match trainer::train(Path::new(path)) {
        Ok(estimator) => Box::into_raw(Box::new(estimator)),
        Err(e) => {
            log::error!("train_estimator: {e}");
            ptr::null_mut()
        }
    }
}

/// Estimate a price for one query. Writes the estimate through `price_out`
/// and returns true, or returns false leaving `price_out` untouched.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn predict_ticket_price(
    handle: *const Estimator,
    airline: *const c_char,
    source_city: *const c_char,
    departure_time: *const c_char,
    stops: *const c_char,
    arrival_time: *const c_char,
    destination_city: *const c_char,
    travel_class: *const c_char,
    days_left: u32,
    price_out: *mut f64,
) -> bool {
    let Some(estimator) = (unsafe { handle.as_ref() }) else {
        log::error!("predict_ticket_price: null estimator handle");
        return false;
    };
    if price_out.is_null() {
        log::error!("predict_ticket_price: null price_out");
        return false;
    }
    let fields = unsafe {
        [
            cstr(airline),
            cstr(source_city),
            cstr(departure_time),
            cstr(stops),
            cstr(arrival_time),
            cstr(destination_city),
            cstr(travel_class),
        ]
    };
    let [
        Some(airline),
        Some(source_city),
        Some(departure_time),
        Some(stops),
        Some(arrival_time),
        Some(destination_city),
        Some(travel_class),
    ] = fields
    else {
        log::error!("predict_ticket_price: null or non-utf-8 attribute");
        return false;
    };
    let query = FlightQuery {
        airline: airline.to_string(),
        source_city: source_city.to_string(),
        departure_time: departure_time.to_string(),
        stops: stops.to_string(),
        arrival_time: arrival_time.to_string(),
        destination_city: destination_city.to_string(),
        travel_class: travel_class.to_string(),
        days_left,
    };
    match estimator.predict(&query) {
        Ok(price) => {
            unsafe { *price_out = price };
            true
        }
        Err(e) => {
            log::error!("predict_ticket_price: {e}");
            false
        }
    }
}

/// Release a handle produced by `train_estimator`. Null is allowed.
#[unsafe(no_mangle)]
pub extern "C" fn free_estimator(handle: *mut Estimator) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}
