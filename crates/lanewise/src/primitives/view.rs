//! Buffer views and overlap detection.
//!
//! ## Purpose
//!
//! This module provides the read (`Span`) and write (`SpanMut`) views the
//! engines operate on, and the overlap validator that decides whether an input
//! may be read while the destination is written.
//!
//! ## Design notes
//!
//! * **Caller-owned memory**: Views borrow a buffer for `'a`; the engines never
//!   allocate, free, or retain buffer memory past a call.
//! * **Raw access only**: Views expose no safe element access. Elements are read
//!   and written through raw pointers inside the engines, which is what allows a
//!   `Span` of the destination itself (a true in-place call) to coexist with the
//!   `SpanMut` being written.
//! * **Thread safety**: Views are `Send`/`Sync` exactly when the slice references
//!   they stand for (`&[T]`, `&mut [T]`) are.
//!
//! ## Key concepts
//!
//! * **Identity**: Two views are the same buffer when they start at the same address.
//! * **Overlap**: Two views overlap when their address ranges intersect.
//!
//! ## Invariants
//!
//! * A view built from a slice is valid for `len` reads (and writes for `SpanMut`).
//! * `overlaps` is symmetric and never reports empty views.
//!
//! ## Non-goals
//!
//! * Strided or non-contiguous views.

// External dependencies
use core::marker::PhantomData;
use core::mem;
use core::ptr;

// Internal dependencies
use crate::primitives::lane::Lane;

// ============================================================================
// Span - Read View
// ============================================================================

/// Read-only view of a contiguous buffer.
#[derive(Debug)]
pub struct Span<'a, T> {
    ptr: *const T,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

// SAFETY: a `Span` grants the same access as `&[T]`.
unsafe impl<T: Sync> Send for Span<'_, T> {}
unsafe impl<T: Sync> Sync for Span<'_, T> {}

impl<'a, T> Span<'a, T> {
    /// View a slice.
    #[inline]
    pub fn new(slice: &'a [T]) -> Self {
        Self {
            ptr: slice.as_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// View `len` elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` elements of `T` for `'a`, and the
    /// memory must not be written during `'a` except through an engine call
    /// whose destination is validated against this view.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base address.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Element at `index`.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn read(&self, index: usize) -> T
    where
        T: Copy,
    {
        ptr::read(self.ptr.add(index))
    }

    /// Lane starting at `index`.
    ///
    /// # Safety
    ///
    /// `index + L::WIDTH <= self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn load<L: Lane<T>>(&self, index: usize) -> L
    where
        T: Copy,
    {
        L::load(self.ptr.add(index))
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Span::new(slice)
    }
}

impl<'a, T> From<&'a mut [T]> for Span<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Span::new(slice)
    }
}

// ============================================================================
// SpanMut - Write View
// ============================================================================

/// Writable view of a contiguous buffer.
#[derive(Debug)]
pub struct SpanMut<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: a `SpanMut` grants the same access as `&mut [T]`.
unsafe impl<T: Send> Send for SpanMut<'_, T> {}
unsafe impl<T: Sync> Sync for SpanMut<'_, T> {}

impl<'a, T> SpanMut<'a, T> {
    /// View a mutable slice.
    #[inline]
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// View `len` elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` elements of `T` for `'a`,
    /// and no other reference to that memory may be used during `'a`.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base address.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Mutable base address.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr
    }

    /// Read view of this same buffer, for in-place calls.
    ///
    /// The returned span is identical to the destination, so the engines accept
    /// it as a source for this `SpanMut`.
    #[inline]
    pub fn as_source(&self) -> Span<'a, T> {
        Span {
            ptr: self.ptr,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Write `value` at `index`.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        ptr::write(self.ptr.add(index), value);
    }

    /// Store `lane` starting at `index`.
    ///
    /// # Safety
    ///
    /// `index + L::WIDTH <= self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn store<L: Lane<T>>(&mut self, index: usize, lane: L)
    where
        T: Copy,
    {
        lane.store(self.ptr.add(index));
    }
}

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        SpanMut::new(slice)
    }
}

// ============================================================================
// Overlap Validator
// ============================================================================

/// Whether `a` and `b` overlap without being the same buffer.
///
/// Returns `false` when either view is empty or both start at the same
/// address (an in-place operation); otherwise reports whether the address
/// ranges intersect.
pub fn overlaps<T>(a: Span<'_, T>, b: Span<'_, T>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let size = mem::size_of::<T>();
    let a_start = a.as_ptr() as usize;
    let b_start = b.as_ptr() as usize;

    if a_start == b_start {
        return false;
    }

    let a_end = a_start + a.len() * size;
    let b_end = b_start + b.len() * size;

    a_start < b_end && b_start < a_end
}

/// Slice form of [`overlaps`].
pub fn slices_overlap<T>(a: &[T], b: &[T]) -> bool {
    overlaps(Span::new(a), Span::new(b))
}
