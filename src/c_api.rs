// C ABI for bot front-ends written in other languages.
// Every entry point catches panics so they never cross the FFI boundary.
use crate::config::EngineConfig;
use crate::core::engine::TajweedEngine;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::{PoisonError, RwLock};

static TAJWEED_ENGINE: RwLock<Option<TajweedEngine>> = RwLock::new(None);

fn build_engine() -> TajweedEngine {
    let config = EngineConfig::from_env().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        EngineConfig::default()
    });
    TajweedEngine::from_config(&config).unwrap_or_else(|e| {
        log::warn!("Glossary unavailable, continuing without translation: {}", e);
        TajweedEngine::new()
    })
}

fn into_c_string(s: String) -> *mut c_char {
    // Interior NULs cannot be represented; drop them.
    let bytes: Vec<u8> = s.into_bytes().into_iter().filter(|&b| b != 0).collect();
    CString::new(bytes).map_or(ptr::null_mut(), CString::into_raw)
}

/// Runs `f` against the engine, initializing it lazily.
fn with_engine<F>(input: *const c_char, f: F) -> *mut c_char
where
    F: Fn(&TajweedEngine, &str) -> Option<String>,
{
    if input.is_null() {
        return ptr::null_mut();
    }
    let text = match unsafe { CStr::from_ptr(input) }.to_str() {
        Ok(t) => t,
        Err(_) => return ptr::null_mut(),
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        tajweed_engine_init();
        let guard = TAJWEED_ENGINE.read().unwrap_or_else(PoisonError::into_inner);
        let engine = guard.as_ref()?;
        f(engine, text)
    }));
    match result {
        Ok(Some(s)) => into_c_string(s),
        Ok(None) => ptr::null_mut(),
        Err(_) => {
            log::error!("Panic inside the tajweed engine.");
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn tajweed_engine_init() {
    let result = catch_unwind(|| {
        let mut slot = TAJWEED_ENGINE.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(build_engine());
            log::info!("Tajweed engine initialized.");
        }
    });
    if result.is_err() {
        log::error!("A panic occurred during tajweed engine initialization.");
    }
}

#[no_mangle]
pub extern "C" fn tajweed_engine_destroy() {
    let mut slot = TAJWEED_ENGINE.write().unwrap_or_else(PoisonError::into_inner);
    if slot.take().is_some() {
        log::info!("Tajweed engine released.");
    }
}

/// Returns the analysis result as JSON, or null on invalid input.
/// The caller frees the string with `tajweed_free_string`.
#[no_mangle]
pub extern "C" fn tajweed_analyze_json(text: *const c_char) -> *mut c_char {
    with_engine(text, |engine, text| {
        serde_json::to_string(&engine.analyze_text(text)).ok()
    })
}

/// Returns the formatted report, or null on invalid input.
#[no_mangle]
pub extern "C" fn tajweed_report(text: *const c_char) -> *mut c_char {
    with_engine(text, |engine, text| Some(engine.report(text)))
}

#[no_mangle]
pub extern "C" fn tajweed_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
