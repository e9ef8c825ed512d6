//! Default acquisition parameters for synthetic or converted datasets

use crate::params::ParameterMap;

/// Settings describing a simple 1D proton acquisition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcquisitionParameters {
    /// B1 (spectrometer) frequency in MHz
    pub b1_freq_mhz: f64,
    /// Carrier offset in Hz
    pub offset_hz: f64,
    /// Dwell time in seconds
    pub dwell_time_s: f64,
    /// Ringdown delay in seconds
    pub acq_delay_s: f64,
    /// Number of complex points
    pub n_points: u32,
    /// Number of scans
    pub n_scans: u32,
}

impl AcquisitionParameters {
    pub fn new(b1_freq_mhz: f64, offset_hz: f64, dwell_time_s: f64, acq_delay_s: f64, n_points: u32) -> Self {
        Self {
            b1_freq_mhz,
            offset_hz,
            dwell_time_s,
            acq_delay_s,
            n_points,
            n_scans: 1,
        }
    }

    pub fn with_scans(mut self, n_scans: u32) -> Self {
        self.n_scans = n_scans;
        self
    }

    /// Sweep bandwidth in Hz
    pub fn bandwidth_hz(&self) -> f64 {
        1.0 / self.dwell_time_s
    }

    /// Build an `acqu.par`-style parameter map
    ///
    /// Units follow the instrument files: `acqDelay` in µs, `dwellTime` in ms,
    /// `bandwidth` in kHz, `lowestFrequency` in Hz.
    pub fn to_parameter_map(&self) -> ParameterMap {
        let bandwidth = self.bandwidth_hz();
        let software = env!("CARGO_PKG_NAME");

        let mut params = ParameterMap::new();
        params.insert("Solvent", "");
        params.insert("Sample", "");
        params.insert("startTime", "");
        params.insert("acqDelay", self.acq_delay_s * 1e6);
        params.insert("b1Freq", self.b1_freq_mhz);
        params.insert("bandwidth", bandwidth / 1000.0);
        params.insert("dwellTime", self.dwell_time_s * 1000.0);
        params.insert("experiment", "1D");
        params.insert("expName", "1D");
        params.insert("nrPnts", self.n_points);
        params.insert("nrScans", self.n_scans);
        params.insert("repTime", 0.0);
        params.insert("rxChannel", "1H");
        params.insert("rxGain", 0.0);
        params.insert("lowestFrequency", -bandwidth / 2.0 + self.offset_hz);
        params.insert("totalAcquisitionTime", 53.0);
        params.insert("graphTitle", "1D-1H-\"StandardScan\"");
        params.insert("userData", "");
        params.insert("90Amplitude", 0.0);
        params.insert("pulseLength", 0.0);
        params.insert("Protocol", "1D PROTON");
        params.insert("Options", "Scan(StandardScan)");
        params.insert("Spectrometer", software);
        params.insert("Software", software);
        params
    }
}
