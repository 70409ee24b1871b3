pub(super) mod interaction;
mod view;
