mod classifier_never_trained;
pub use classifier_never_trained::ClassifierNeverTrained;
