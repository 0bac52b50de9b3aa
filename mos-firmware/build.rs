// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert Linker und Board-Library für das 6502 Target (llvm-mos)

fn main() {
    // Lade .env file für Blink-Timing und BSP-Pfad
    // Fehler ignorieren wenn .env nicht existiert (dann gelten die Defaults)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   Nutze Defaults (LED_HALF_PERIOD_MS=500)");
    }

    // Blink-Halbperiode zur Compile-Zeit einbacken (optional)
    if let Ok(half_period) = std::env::var("LED_HALF_PERIOD_MS") {
        println!("cargo:rustc-env=LED_HALF_PERIOD_MS={}", half_period);
    }
    println!("cargo:rerun-if-env-changed=LED_HALF_PERIOD_MS");

    // Board Support Package (uart_init, uart_puts, uart_putc, timer_init, delay_ms)
    // Statische C-Library aus dem cc65/llvm-mos Template
    if let Ok(bsp_dir) = std::env::var("MOS_BSP_DIR") {
        println!("cargo:rustc-link-search=native={}", bsp_dir);
    }
    println!("cargo:rerun-if-env-changed=MOS_BSP_DIR");
    println!("cargo:rustc-link-lib=static=tang6502bsp");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // defmt.x - defmt Logging-Support
    // Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "uart_init")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and the firmware's global logger is linked"
                    );
                    eprintln!();
                }
                "uart_init" | "uart_puts" | "uart_putc" | "timer_init" | "delay_ms" => {
                    eprintln!();
                    eprintln!(
                        "💡 Board support library missing - set MOS_BSP_DIR to the directory containing libtang6502bsp.a"
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    match std::env::current_exe() {
        Ok(exe) => println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        ),
        Err(e) => eprintln!("⚠️  Linker-Hilfe nicht verfügbar: {}", e),
    }
}
