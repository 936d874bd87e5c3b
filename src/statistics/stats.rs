/// Running-average accumulator for a vector observable.
///
/// `power` raises each incoming value before accumulation, so `<E>` and
/// `<E^2>` can share one measurement pass.
pub struct Statistics {
    pub count: usize,
    pub aggregate: Vec<f64>,
    pub power: u32,
}

impl Statistics {
    pub fn new(len: usize, power: u32) -> Self {
        Self {
            count: 0,
            aggregate: vec![0.0; len],
            power,
        }
    }

    pub fn update(&mut self, values: &[f64]) {
        self.count += 1;
        for (agg, &v) in self.aggregate.iter_mut().zip(values.iter()) {
            *agg += if self.power == 1 {
                v
            } else {
                v.powi(self.power as i32)
            };
        }
    }

    pub fn average(&self) -> Vec<f64> {
        if self.count == 0 {
            return self.aggregate.clone();
        }
        let c = self.count as f64;
        self.aggregate.iter().map(|&a| a / c).collect()
    }
}
