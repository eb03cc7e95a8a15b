//! C ABI for the Wolfram comment scanner.
//!
//! Exports the five functions a generated parser looks up by name for its
//! external scanner. The scanner keeps no state, so the payload is always
//! null and every call shares one [`Scanner`].

mod host_lexer;

use core::{
    ffi::{c_char, c_uint, c_void},
    ptr::{self, NonNull},
    slice,
};

pub use host_lexer::TSLexer;
use host_lexer::HostLexer;
use wolfram_scanner::{Scanner, Symbol};

const SCANNER: Scanner = Scanner::new();

/// Creates the scanner payload. There is no state, so this is null.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_wolfram_external_scanner_create() -> *mut c_void {
    ptr::null_mut()
}

/// Releases a payload from [`tree_sitter_wolfram_external_scanner_create`].
/// Accepts null.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_wolfram_external_scanner_destroy(_payload: *mut c_void) {}

/// Serializes the payload into `buffer`. Always writes nothing and returns
/// zero.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_wolfram_external_scanner_serialize(
    _payload: *mut c_void,
    _buffer: *mut c_char,
) -> c_uint {
    // Nothing is written, so the host buffer is never touched.
    c_uint::try_from(SCANNER.serialize(&mut [])).unwrap_or(0)
}

/// Restores a payload from `length` bytes at `buffer`. Contents are ignored.
///
/// # Safety
///
/// When `buffer` is non-null it must be valid for reads of `length` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tree_sitter_wolfram_external_scanner_deserialize(
    _payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    let bytes: &[u8] = if buffer.is_null() || length == 0 {
        &[]
    } else {
        // SAFETY: non-null and readable for `length` bytes per the contract.
        unsafe { slice::from_raw_parts(buffer.cast::<u8>(), length as usize) }
    };
    let mut scanner = SCANNER;
    scanner.deserialize(bytes);
}

/// Scans for a comment at the host lexer's cursor. Returns `true` iff a
/// comment token was produced.
///
/// # Safety
///
/// `lexer`, when non-null, must point to a live host lexer whose function
/// pointers are valid for the duration of the call. `valid_symbols`, when
/// non-null, must point to at least one `bool`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tree_sitter_wolfram_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let Some(lexer) = NonNull::new(lexer) else {
        return false;
    };
    let valid_symbols: &[bool] = if valid_symbols.is_null() {
        &[]
    } else {
        // SAFETY: the host passes one flag per external token.
        unsafe { slice::from_raw_parts(valid_symbols, Symbol::COUNT) }
    };
    // SAFETY: non-null and live for this call per the contract.
    let mut host = unsafe { HostLexer::new(lexer) };
    SCANNER.scan(&mut host, valid_symbols)
}
