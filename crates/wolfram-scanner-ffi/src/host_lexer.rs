use core::{ffi::c_char, ptr::NonNull};

use wolfram_scanner::{Lexer, Symbol};

/// Layout-compatible mirror of the host runtime's lexer.
#[repr(C)]
pub struct TSLexer {
    /// Code point at the cursor, 0 at end of input.
    pub lookahead: i32,
    /// Ordinal of the produced external token.
    pub result_symbol: u16,
    /// Consumes the lookahead; `true` marks it as skipped whitespace.
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    /// Pins the cursor as the token end.
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    /// Column of the cursor.
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    /// Whether the cursor is at the start of an included range.
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    /// Whether the cursor is at end of input.
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
    /// printf-style debug log hook, absent on older hosts.
    pub log: Option<unsafe extern "C" fn(*const TSLexer, *const c_char, ...)>,
}

/// [`Lexer`] over a host-owned [`TSLexer`].
pub(crate) struct HostLexer {
    raw: NonNull<TSLexer>,
}

impl HostLexer {
    /// # Safety
    ///
    /// `raw` must point to a live `TSLexer` with valid function pointers for
    /// as long as the returned value is used.
    pub(crate) unsafe fn new(raw: NonNull<TSLexer>) -> Self {
        Self { raw }
    }
}

impl Lexer for HostLexer {
    fn lookahead(&self) -> char {
        // SAFETY: `raw` is live per `HostLexer::new`.
        let raw = unsafe { self.raw.as_ref() }.lookahead;
        u32::try_from(raw)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn advance(&mut self, skip: bool) {
        let raw = self.raw.as_ptr();
        // SAFETY: `raw` is live and `advance` is a valid host callback.
        unsafe { ((*raw).advance)(raw, skip) }
    }

    fn mark_end(&mut self) {
        let raw = self.raw.as_ptr();
        // SAFETY: as in `advance`.
        unsafe { ((*raw).mark_end)(raw) }
    }

    fn eof(&self) -> bool {
        let raw = self.raw.as_ptr();
        // SAFETY: as in `advance`.
        unsafe { ((*raw).eof)(raw) }
    }

    fn set_result_symbol(&mut self, symbol: Symbol) {
        // SAFETY: `raw` is live and no other reference to it is held here.
        unsafe { self.raw.as_mut() }.result_symbol = symbol.ordinal();
    }
}
