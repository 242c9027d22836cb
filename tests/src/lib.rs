#[cfg(test)]
mod support;

mod report;
