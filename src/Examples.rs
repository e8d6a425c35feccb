pub mod mechtools_examples;
