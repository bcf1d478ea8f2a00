//! # Text Rendering
//!
//! Human-readable dump of a decoded record, one labelled value per line.

use std::fmt;

use crate::line::protocol::{CalendarDate, ClockTime, TelemetryRecord};

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for TelemetryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "strato3_data = {{")?;
        writeln!(f, "  uptime:           {}", self.uptime)?;
        writeln!(f, "  time:             {}", self.time)?;
        writeln!(f, "  date:             {}", self.date)?;
        writeln!(f, "  valid:            {}", if self.valid { 'Y' } else { 'N' })?;
        writeln!(f, "  satellites:       {}", self.satellites)?;
        writeln!(f, "  latitude:         {:.7}", self.latitude.to_decimal_degrees())?;
        writeln!(f, "  longitude:        {:.7}", self.longitude.to_decimal_degrees())?;
        writeln!(f, "  speed (knt):      {:.4}", self.speed_knots.to_f64())?;
        writeln!(f, "  speed (kph):      {:.1}", self.speed_kph.to_f64())?;
        writeln!(f, "  course:           {:.1}", self.course.to_f64())?;
        writeln!(f, "  altitude:         {:.1}", self.altitude.to_f64())?;
        writeln!(f, "  temperature(in):  {:.1}", self.temperature_board.to_f64())?;
        writeln!(f, "  temperature(ex):  {:.1}", self.temperature.to_f64())?;
        writeln!(f, "  humidity:         {:.1}", self.humidity.to_f64())?;
        writeln!(f, "  pressure:         {:.3}", self.pressure.to_f64())?;
        writeln!(f, "  voltage:          {:.1}", self.voltage.to_f64())?;
        writeln!(f, "  state:            {}", self.state)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use crate::line::decoder::parse_str;
    use crate::line::protocol::*;

    const SAMPLE: &str = "$;00:05:13;19:36:26;13.09.2016;Y;04;40 40.68437 N;005 30.70415 E;0.432;0.800;;91.2;11.625;12.625;37.56;1009.809;8.6;66679";

    #[test]
    fn test_render_sample() {
        let record = parse_str(SAMPLE).unwrap().record;
        let expected = "\
strato3_data = {
  uptime:           00:05:13
  time:             19:36:26
  date:             2016-09-13
  valid:            Y
  satellites:       4
  latitude:         40.6780728
  longitude:        5.5117358
  speed (knt):      0.4320
  speed (kph):      0.8
  course:           NaN
  altitude:         91.2
  temperature(in):  11.6
  temperature(ex):  12.6
  humidity:         37.6
  pressure:         1009.809
  voltage:          8.6
  state:            66679
}";
        assert_eq!(record.to_string(), expected);
    }

    #[test]
    fn test_render_clock_and_date() {
        let time = ClockTime { hour: 7, minute: 3, second: 9 };
        assert_eq!(time.to_string(), "07:03:09");

        let date = CalendarDate { day: 1, month: 2, year: 2017 };
        assert_eq!(date.to_string(), "2017-02-01");
    }

    #[test]
    fn test_render_default_record() {
        let rendered = TelemetryRecord::default().to_string();
        assert!(rendered.contains("valid:            N"));
        assert!(rendered.contains("latitude:         NaN"));
        assert!(rendered.contains("date:             0-00-00"));
    }
}
