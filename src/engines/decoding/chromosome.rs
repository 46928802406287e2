/// Chromosome representation for the random-key search
///
/// A chromosome is a fixed-length vector of reals in [0,1), one gene per
/// declared parameter. The evolver owns and varies chromosomes; the
/// decoder only ever reads them.
///
/// # Why random keys instead of typed genes?
///
/// Evolutionary operators stay trivial on a flat real vector:
/// - **Crossover**: per-gene inheritance needs no repair step
/// - **Mutation**: resampling a gene keeps it in [0,1)
/// - **No invalid states**: every vector decodes to a well-typed
///   configuration
///
/// # Conversion
///
/// Use `Decoder::decode()` to turn a chromosome into a `ParamConfig`.
pub type Chromosome = Vec<f64>;
