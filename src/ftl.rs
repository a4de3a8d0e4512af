pub mod arrival;
pub mod report;
pub mod resolver;
pub mod segmenter;

#[cfg(test)]
mod tests {
    mod arrival;
    mod proptests;
    mod resolver;
    mod segmenter;
    mod utils;
}
