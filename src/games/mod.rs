pub mod klondike;
