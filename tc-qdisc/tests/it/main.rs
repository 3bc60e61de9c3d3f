//! Integration tests for the discipline codecs.

mod drr;
mod hfsc;
