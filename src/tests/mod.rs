// Test modules for RoomDesk
// Each module contains integration-style tests for the corresponding area

mod session_tests;
mod support_tests;
