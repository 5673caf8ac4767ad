//! Data models for the address book.
//!
//! This module contains the data structures representing contacts held
//! in the in-memory address book.

pub mod contact;

pub use contact::Contact;
