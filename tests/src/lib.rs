#[cfg(test)]
mod greeting;
